/// Static sprite drawn at the entity's position (tiles, props).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderComponent {
    pub texture_name: String,
}

impl RenderComponent {
    pub fn new(texture_name: impl Into<String>) -> Self {
        Self {
            texture_name: texture_name.into(),
        }
    }
}
