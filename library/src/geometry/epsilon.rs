pub(crate) const DEFAULT_EPSILON_F32: f32 = 1e-5;
