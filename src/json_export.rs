use serde::{Deserialize, Serialize};

use crate::level_pack::LevelPack;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonPack {
    pub levels: Vec<JsonLevel>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonLevel {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub rows: Vec<String>,
}

impl JsonPack {
    pub fn from_pack(pack: &LevelPack) -> Self {
        let levels = pack
            .levels()
            .iter()
            .enumerate()
            .map(|(index, level)| JsonLevel {
                index,
                id: level.id,
                rows: level
                    .grid
                    .rows()
                    .iter()
                    .map(|row| row.iter().map(|c| c.glyph()).collect())
                    .collect(),
            })
            .collect();
        JsonPack { levels }
    }
}

pub fn get_json_data(pack: &LevelPack) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonPack::from_pack(pack))
}
