use std::collections::HashMap;
use std::rc::Rc;
use wgpu::{BindGroup, BindingResource, Buffer, Sampler, TextureView};

pub(crate) struct BindGroupBuilder<'a> {
    index: u32,
    label: Option<&'a str>,
    layout: wgpu::BindGroupLayout,

    accumulated_buffer_entries: HashMap<u32, Rc<Buffer>>,
    accumulated_sampler_entries: HashMap<u32, Sampler>,
    accumulated_texture_entries: HashMap<u32, TextureView>,
}

impl<'a> BindGroupBuilder<'a> {
    #[must_use]
    pub(super) fn new(index: u32, label: Option<&'a str>, layout: wgpu::BindGroupLayout) -> Self {
        Self {
            index,
            label,
            layout,
            accumulated_buffer_entries: HashMap::new(),
            accumulated_sampler_entries: HashMap::new(),
            accumulated_texture_entries: HashMap::new(),
        }
    }

    pub(crate) fn set_buffer_entry(&mut self, slot: u32, buffer: Rc<Buffer>) -> &mut Self {
        assert!(!self.accumulated_sampler_entries.contains_key(&slot), "slot already occupied by a sampler");
        assert!(!self.accumulated_texture_entries.contains_key(&slot), "slot already occupied by a texture");

        let previous = self.accumulated_buffer_entries.insert(slot, buffer);
        assert!(previous.is_none(), "slot {slot} already set");
        self
    }

    pub(crate) fn set_sampler_entry(&mut self, slot: u32, sampler: Sampler) -> &mut Self {
        assert!(!self.accumulated_buffer_entries.contains_key(&slot), "slot already occupied by a buffer");
        assert!(!self.accumulated_texture_entries.contains_key(&slot), "slot already occupied by a texture");

        let previous = self.accumulated_sampler_entries.insert(slot, sampler);
        assert!(previous.is_none(), "slot {slot} already set");
        self
    }

    pub(crate) fn set_texture_entry(&mut self, slot: u32, view: TextureView) -> &mut Self {
        assert!(!self.accumulated_buffer_entries.contains_key(&slot), "slot already occupied by a buffer");
        assert!(!self.accumulated_sampler_entries.contains_key(&slot), "slot already occupied by a sampler");

        let previous = self.accumulated_texture_entries.insert(slot, view);
        assert!(previous.is_none(), "slot {slot} already set");
        self
    }

    #[must_use]
    pub(super) fn make_bind_group(&self, device: &wgpu::Device) -> BindGroup {
        let entries = {
            let mut entries = Vec::new();
            self.accumulated_buffer_entries.iter().for_each(
                |(slot_number, buffer)| {
                    entries.push(wgpu::BindGroupEntry {
                        binding: *slot_number,
                        resource: buffer.as_entire_binding(),
                    });
                });
            self.accumulated_sampler_entries.iter().for_each(
                |(slot_number, sampler)| {
                    entries.push(wgpu::BindGroupEntry {
                        binding: *slot_number,
                        resource: BindingResource::Sampler(sampler),
                    });
                });
            self.accumulated_texture_entries.iter().for_each(
                |(slot_number, texture_view)| {
                    entries.push(wgpu::BindGroupEntry {
                        binding: *slot_number,
                        resource: BindingResource::TextureView(texture_view),
                    });
                });
            entries
        };
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: self.label,
            layout: &self.layout,
            entries: entries.as_slice(),
        })
    }

    #[must_use]
    pub(super) fn index(&self) -> u32 {
        self.index
    }
}
