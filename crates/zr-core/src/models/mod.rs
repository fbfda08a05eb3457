pub mod board;
pub mod comment;
pub mod entity_id;
pub mod task;
pub mod task_draft;
pub mod task_record;
pub mod task_status;
pub mod teacher;

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
