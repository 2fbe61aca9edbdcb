use thiserror::Error;

use crate::RawMeshHandle;

bitflags::bitflags! {
    /// Set of vertex attributes a mesh exposes.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct VertexAttributes : u8 {
        const POSITION =            0b0000_0001;
        const NORMAL =              0b0000_0010;
        const TANGENT =             0b0000_0100;
        const BITANGENT =           0b0000_1000;
        const TEXTURE_COORDINATES = 0b0001_0000;
        const COLOR =               0b0010_0000;
    }
}

const ATTRIBUTE_NAMES: [(VertexAttributes, &str); 6] = [
    (VertexAttributes::POSITION, "position"),
    (VertexAttributes::NORMAL, "normal"),
    (VertexAttributes::TANGENT, "tangent"),
    (VertexAttributes::BITANGENT, "bitangent"),
    (VertexAttributes::TEXTURE_COORDINATES, "uv"),
    (VertexAttributes::COLOR, "color"),
];

/// Error returned when looking up a vertex attribute by a name lumen doesn't know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown vertex attribute {name:?}")]
pub struct UnknownAttributeError {
    pub name: String,
}

impl VertexAttributes {
    /// Name of a single attribute, as used by [`VertexAttributes::from_names`].
    pub fn attribute_name(self) -> Option<&'static str> {
        ATTRIBUTE_NAMES
            .iter()
            .find_map(|&(attribute, name)| (attribute == self).then_some(name))
    }

    /// Builds an attribute set out of attribute names.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, UnknownAttributeError> {
        names.into_iter().try_fold(Self::empty(), |set, name| {
            let attribute = ATTRIBUTE_NAMES
                .iter()
                .find_map(|&(attribute, attribute_name)| (attribute_name == name).then_some(attribute))
                .ok_or_else(|| UnknownAttributeError { name: name.to_owned() })?;
            Ok(set | attribute)
        })
    }
}

/// The parts of a mesh lumen cares about: which resource it is, and which
/// attributes its vertices carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mesh {
    pub handle: RawMeshHandle,
    attributes: VertexAttributes,
}

impl Mesh {
    /// All vertices have positions, so `POSITION` is always added.
    pub fn new(handle: RawMeshHandle, attributes: VertexAttributes) -> Self {
        Self {
            handle,
            attributes: attributes | VertexAttributes::POSITION,
        }
    }

    pub fn attributes(&self) -> VertexAttributes {
        self.attributes
    }

    /// Returns true if the mesh carries every attribute in `attribute`.
    pub fn has_attribute(&self, attribute: VertexAttributes) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn has_normals(&self) -> bool {
        self.has_attribute(VertexAttributes::NORMAL)
    }

    pub fn has_uvs(&self) -> bool {
        self.has_attribute(VertexAttributes::TEXTURE_COORDINATES)
    }

    pub fn has_tangents(&self) -> bool {
        self.has_attribute(VertexAttributes::TANGENT)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> {
        self.attributes.iter().filter_map(VertexAttributes::attribute_name)
    }
}
