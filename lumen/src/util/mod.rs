pub mod typedefs;
