//! Error macros for wayfinder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfinderError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex that is not part of the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains_vertex($vertex) {
            return Err($crate::error::WayfinderError::vertex_not_found($vertex));
        }
    };
}
