use crate::gpu::resources::Resources;
use crate::scene::texture_warehouse::{MipChain, TextureSlot, TextureWarehouse};
use image::{Rgba, RgbaImage};

/// GPU copies of every texture in the warehouse, addressed by the same slots.
pub(super) struct BitmapTextures {
    views: Vec<wgpu::TextureView>,
    fallback: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl BitmapTextures {
    #[must_use]
    pub(super) fn new(resources: &Resources, warehouse: &TextureWarehouse) -> Self {
        let views = warehouse
            .iter()
            .enumerate()
            .map(|(index, mips)| {
                let label = format!("bitmap texture {index}");
                resources.create_texture(&label, mips).create_view(&wgpu::TextureViewDescriptor::default())
            })
            .collect();

        let white_pixel = MipChain::new(RgbaImage::from_pixel(1, 1, Rgba([u8::MAX; 4])));
        let fallback = resources.create_texture("fallback texture", &white_pixel).create_view(&wgpu::TextureViewDescriptor::default());

        Self { views, fallback, sampler: resources.create_sampler("bitmap texture sampler") }
    }

    /// Objects without a texture bind a single white texel.
    #[must_use]
    pub(super) fn view(&self, slot: Option<TextureSlot>) -> wgpu::TextureView {
        match slot {
            Some(slot) => self.views[slot.0].clone(),
            None => self.fallback.clone(),
        }
    }

    #[must_use]
    pub(super) fn sampler(&self) -> wgpu::Sampler {
        self.sampler.clone()
    }
}
