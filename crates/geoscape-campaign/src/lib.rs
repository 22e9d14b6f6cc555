//! Campaign persistence for the geoscape.
//!
//! Only the logical state is written: radar owners with their ranges,
//! contacts with their routes and `detected` flags, the clock and the
//! overlay pin. Sensored sets are rebuilt on load.

pub mod save_load;

pub use save_load::{
    delete_save, from_save_data, list_saves, load_from_file, save_to_file, to_save_data,
    ContactSave, SaveData, SaveError, SaveMetadata, SiteSave,
};
