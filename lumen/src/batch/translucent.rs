use lumen_types::Light;

use crate::{
    label::{Label, LabelTokens, TranslucentLitLabel, TranslucentUnlitLabel},
    scene::{Scene, SceneTranslucent},
    Capabilities,
};

/// Label of a single translucent draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslucentDrawLabel {
    Lit(TranslucentLitLabel),
    Unlit(TranslucentUnlitLabel),
}

impl Label for TranslucentDrawLabel {
    fn tokens(&self) -> LabelTokens {
        match self {
            Self::Lit(label) => label.tokens(),
            Self::Unlit(label) => label.tokens(),
        }
    }

    fn texture_units_required(&self) -> u32 {
        match self {
            Self::Lit(label) => label.texture_units_required(),
            Self::Unlit(label) => label.texture_units_required(),
        }
    }
}

/// One draw of the translucent pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslucentDraw<'a> {
    pub entry: &'a SceneTranslucent,
    /// The light of this draw, `None` for unlit entries.
    pub light: Option<&'a Light>,
    pub label: TranslucentDrawLabel,
}

/// Lists the translucent draws in the scene's order.
///
/// Lit entries produce one draw per light, in the order the lights were
/// given. Nothing is re-sorted, blending depends on the caller's order.
pub fn batch_translucent<'a>(scene: &'a Scene, capabilities: &Capabilities) -> Vec<TranslucentDraw<'a>> {
    profiling::scope!("batch_translucent");

    let mut draws = Vec::with_capacity(scene.translucents().len());
    for entry in scene.translucents() {
        match entry {
            SceneTranslucent::Unlit(instance) => draws.push(TranslucentDraw {
                entry,
                light: None,
                label: TranslucentDrawLabel::Unlit(TranslucentUnlitLabel::from_instance(instance)),
            }),
            SceneTranslucent::Lit { instance, lights } => {
                draws.extend(lights.iter().map(|light| TranslucentDraw {
                    entry,
                    light: Some(light),
                    label: TranslucentDrawLabel::Lit(TranslucentLitLabel::from_instance(light, capabilities, instance)),
                }));
            }
        }
    }

    for draw in draws.iter().filter(|draw| !capabilities.fits(&draw.label)) {
        log::warn!(
            "Translucent shader {} needs {} texture units, only {} are available",
            draw.label.code(),
            draw.label.texture_units_required(),
            capabilities.texture_units
        );
    }
    log::trace!(
        "Translucent batching: {} entries in {} draws",
        scene.translucents().len(),
        draws.len()
    );
    draws
}
