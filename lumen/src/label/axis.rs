use glam::Vec3;
use lumen_types::{
    AlbedoProperties, AlphaMode, AlphaProperties, EmissiveProperties, EnvironmentProperties, InstanceOpaque, Mesh,
    NormalProperties, RefractiveProperties, SpecularProperties,
};

use super::{rules, Label, LabelTokens};

macro_rules! axis_label {
    (
        $(#[$outer:meta])*
        pub enum $name:ident $(: $prefix:literal)? {
            $(
                $(#[$inner:meta])*
                $variant:ident => ($token:literal, $textures:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$inner])*
                $variant
            ),*
        }

        impl $name {
            /// Every value of this axis, in declaration order.
            pub const ALL: [Self; axis_label!(@count $($variant)*)] = [$(Self::$variant),*];

            /// Code token of this value. May be empty.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),*
                }
            }

            pub const fn texture_units(self) -> u32 {
                match self {
                    $(Self::$variant => $textures),*
                }
            }
        }

        impl Label for $name {
            fn tokens(&self) -> LabelTokens {
                smallvec::smallvec![$($prefix,)? self.token()]
            }

            fn texture_units_required(&self) -> u32 {
                self.texture_units()
            }
        }
    };
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + axis_label!(@count $($tail)*) };
}

axis_label! {
    pub enum AlbedoLabel {
        Coloured => ("BC", 0),
        Textured => ("BT", 1),
    }
}

axis_label! {
    pub enum NormalLabel {
        /// The mesh has no normals, the surface can't be lit.
        None => ("", 0),
        Vertex => ("NV", 0),
        Mapped => ("NM", 1),
    }
}

axis_label! {
    pub enum SpecularLabel {
        None => ("", 0),
        Constant => ("SC", 0),
        Mapped => ("SM", 1),
    }
}

axis_label! {
    pub enum EmissiveLabel {
        None => ("", 0),
        Constant => ("MC", 0),
        Mapped => ("MM", 1),
    }
}

axis_label! {
    pub enum EnvironmentLabel {
        None => ("", 0),
        Reflective => ("ER", 1),
        /// Reflection strength is read from the specular map.
        ReflectiveMapped => ("EM", 1),
    }
}

axis_label! {
    pub enum AlphaLabel {
        Constant => ("AC", 0),
        OneMinusDot => ("AD", 0),
    }
}

axis_label! {
    pub enum RefractiveLabel {
        Unmasked => ("RU", 0),
        Masked => ("RM", 0),
    }
}

axis_label! {
    /// Depth behaviour of an opaque instance, all a depth-only pass cares about.
    pub enum DepthLabel: "dep" {
        /// Always written.
        Constant => ("DC", 0),
        /// Alpha tested against the albedo colour.
        Uniform => ("DU", 0),
        /// Alpha tested against the albedo texture.
        Mapped => ("DM", 1),
    }
}

impl AlbedoLabel {
    pub fn from_properties(mesh: &Mesh, albedo: &AlbedoProperties) -> Self {
        if mesh.has_uvs() && albedo.texture.is_some() && albedo.mix != 0.0 {
            Self::Textured
        } else {
            Self::Coloured
        }
    }
}

impl NormalLabel {
    pub fn from_properties(mesh: &Mesh, normal: &NormalProperties) -> Self {
        if !mesh.has_normals() {
            Self::None
        } else if mesh.has_uvs() && mesh.has_tangents() && normal.texture.is_some() {
            Self::Mapped
        } else {
            Self::Vertex
        }
    }
}

impl SpecularLabel {
    pub fn from_properties(mesh: &Mesh, normal: NormalLabel, specular: &SpecularProperties) -> Self {
        if !rules::specular_allowed(normal) || specular.color == Vec3::ZERO {
            Self::None
        } else if specular.texture.is_some() && mesh.has_uvs() {
            Self::Mapped
        } else {
            Self::Constant
        }
    }
}

impl EmissiveLabel {
    pub fn from_properties(mesh: &Mesh, emissive: &EmissiveProperties) -> Self {
        if emissive.emission == 0.0 {
            Self::None
        } else if emissive.texture.is_some() && mesh.has_uvs() {
            Self::Mapped
        } else {
            Self::Constant
        }
    }
}

impl EnvironmentLabel {
    pub fn from_properties(normal: NormalLabel, specular: SpecularLabel, environment: &EnvironmentProperties) -> Self {
        if !rules::environment_allowed(normal) || environment.texture.is_none() || environment.mix <= 0.0 {
            return Self::None;
        }
        if rules::samples_specular_map(environment, rules::specular_map_available(specular)) {
            Self::ReflectiveMapped
        } else {
            Self::Reflective
        }
    }
}

impl AlphaLabel {
    pub fn from_properties(normal: NormalLabel, alpha: &AlphaProperties) -> Self {
        match alpha.mode {
            AlphaMode::OneMinusDot if rules::alpha_dot_allowed(normal) => Self::OneMinusDot,
            AlphaMode::OneMinusDot | AlphaMode::Constant => Self::Constant,
        }
    }
}

impl RefractiveLabel {
    pub fn from_properties(refractive: &RefractiveProperties) -> Self {
        match refractive.masked {
            true => Self::Masked,
            false => Self::Unmasked,
        }
    }
}

impl DepthLabel {
    pub fn from_instance(instance: &InstanceOpaque) -> Self {
        match instance {
            InstanceOpaque::Regular(_) => Self::Constant,
            InstanceOpaque::AlphaDepth(i) => match AlbedoLabel::from_properties(&i.mesh, &i.material.surface.albedo) {
                AlbedoLabel::Textured => Self::Mapped,
                AlbedoLabel::Coloured => Self::Uniform,
            },
        }
    }
}
