use crate::common::*;

#[doc = "Figure size in pixels"]
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
}

impl FigureConfig {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}
