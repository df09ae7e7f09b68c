//! Level description loading
//!
//! A level is a JSON document with one `hero` record and an
//! `interactive_objs` map of object records. Objects keep file order.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Fatal level loading/validation errors
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed level description: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entity `{name}` has invalid {field} {value} (must be positive)")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f32,
    },
}

/// Start position record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartPos {
    pub x: f32,
    pub y: f32,
}

impl From<StartPos> for Vec2 {
    fn from(p: StartPos) -> Self {
        Vec2::new(p.x, p.y)
    }
}

fn default_metal() -> bool {
    true
}

fn default_friction() -> f32 {
    crate::consts::FRICTION
}

/// Declarative description of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    pub name: String,
    pub mass: f32,
    /// Half-extent of the square collider
    pub size: f32,
    pub start_pos: StartPos,
    /// Non-metal entities are inert scenery
    #[serde(default = "default_metal")]
    pub metal: bool,
    #[serde(default = "default_friction")]
    pub friction: f32,
}

impl EntityDef {
    pub fn new(name: impl Into<String>, mass: f32, size: f32, start: Vec2) -> Self {
        Self {
            name: name.into(),
            mass,
            size,
            start_pos: StartPos { x: start.x, y: start.y },
            metal: true,
            friction: default_friction(),
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start_pos.into()
    }

    /// Check the mass/size invariants
    pub fn validate(&self) -> Result<(), LevelError> {
        for (field, value) in [("mass", self.mass), ("size", self.size)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(LevelError::NonPositive {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A whole level: the hero and the interactive objects
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDescription {
    pub hero: EntityDef,
    #[serde(rename = "interactive_objs", deserialize_with = "ordered_objects")]
    pub objects: Vec<EntityDef>,
}

impl LevelDescription {
    /// Parse and validate a level from JSON text
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelDescription = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Load a level from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level {} (hero `{}`, {} objects)",
            path.display(),
            level.hero.name,
            level.objects.len()
        );
        Ok(level)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        self.hero.validate()?;
        self.objects.iter().try_for_each(EntityDef::validate)
    }
}

/// Collect a JSON object's values in document order
fn ordered_objects<'de, D>(deserializer: D) -> Result<Vec<EntityDef>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ObjectsVisitor;

    impl<'de> Visitor<'de> for ObjectsVisitor {
        type Value = Vec<EntityDef>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of entity records")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut objects = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_key, def)) = map.next_entry::<String, EntityDef>()? {
                objects.push(def);
            }
            Ok(objects)
        }
    }

    deserializer.deserialize_map(ObjectsVisitor)
}
