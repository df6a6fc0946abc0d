use winit::dpi::PhysicalSize;

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct FrameBufferSize {
    width: u32,
    height: u32,
}

impl FrameBufferSize {
    #[must_use]
    pub(crate) fn new(width: u32, height: u32) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        Self { width, height }
    }

    /// Zero-sized windows are clamped to a single pixel.
    #[must_use]
    pub(crate) fn from_window(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width.max(1), size.height.max(1))
    }

    #[must_use]
    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub(crate) fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
