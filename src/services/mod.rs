//! Business logic layer.
//!
//! PDF type detection and the upload controller that applies it to drop and
//! picker events. Reaches the page only through the `view` layer.

pub mod controller;
pub mod validation;

#[cfg(test)]
mod tests {
    #[test]
    fn module_loads() {
        // Verify the services module can be loaded successfully.
    }
}
