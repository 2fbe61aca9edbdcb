//! Material variant classification.
//!
//! A label names exactly which rendering capabilities are active for an
//! instance. Labels are derived from a material's properties and the vertex
//! attributes of the mesh it is drawn with, and are never stored anywhere but
//! in batches.
//!
//! Every label exists in two representations: the structural value, used as
//! a batching key, and a short code string (see [`Label::code`]) which is
//! stable and intended to be used as a shader permutation name. Both are
//! produced from the same [`Label::tokens`] so they cannot disagree.
//!
//! Codes are the role prefix followed by the non-empty axis tokens, in a fixed
//! order, joined by [`CODE_SEPARATOR`]:
//!
//! ```text
//! fwd_OL_LD_BT_NM_SM_ER
//! │   │  │  │  │  │  └ environment: reflective
//! │   │  │  │  │  └ specular: mapped
//! │   │  │  │  └ normal: mapped
//! │   │  │  └ albedo: textured
//! │   │  └ light: directional
//! │   └ role: opaque lit
//! └ pass: forward
//! ```
//!
//! Every axis token is unique across all axes, so two different labels of the
//! same role can never share a code.

use smallvec::SmallVec;

use crate::util::typedefs::SsoString;

mod axis;
mod light;
mod opaque;
pub mod rules;
mod surface;
mod translucent;
mod validate;

pub use axis::*;
pub use light::*;
pub use opaque::*;
pub use surface::*;
pub use translucent::*;
pub use validate::*;

/// Separator placed between the tokens of a code.
pub const CODE_SEPARATOR: char = '_';

/// Ordered code tokens of a label. Empty tokens are allowed and skipped when
/// the code is assembled.
pub type LabelTokens = SmallVec<[&'static str; 10]>;

/// Interface shared by every label, per-axis and composite alike.
pub trait Label {
    /// The code tokens of this label, in code order.
    fn tokens(&self) -> LabelTokens;

    /// Number of texture units a shader for this label samples from.
    fn texture_units_required(&self) -> u32;

    /// The code string of this label.
    fn code(&self) -> SsoString {
        let mut code = SsoString::new();
        for token in self.tokens().into_iter().filter(|t| !t.is_empty()) {
            if !code.is_empty() {
                code.push(CODE_SEPARATOR);
            }
            code.push_str(token);
        }
        code
    }
}

/// Appends the tokens of `label` to `tokens`.
fn extend_tokens(tokens: &mut LabelTokens, label: &impl Label) {
    tokens.extend(label.tokens());
}
