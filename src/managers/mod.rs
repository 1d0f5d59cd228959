// Passify view-model managers
// Managers hold per-screen interactive state: the generator panel and the entry table.

pub mod entry_table;
pub mod generator_panel;
