/// Errors during mesh file encoding.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("triangle count {count} exceeds the format's 32-bit limit")]
    TooManyTriangles { count: usize },
}
