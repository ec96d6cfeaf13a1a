/*!
 * Data Structures
 *
 * Small specialised containers shared by the process model and the engine.
 */

mod inline_string;

pub use inline_string::InlineString;
