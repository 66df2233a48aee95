//! Data models for the PDF drop zone.
//!
//! Holds the selected-file value shared by the drop and picker paths and the
//! settings that bind a controller to a page.

pub mod file;
pub mod settings;

#[cfg(test)]
mod tests {
    #[test]
    fn module_loads() {
        // Verify the models module can be loaded successfully.
    }
}
