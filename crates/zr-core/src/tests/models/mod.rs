mod board;
mod comment;
mod entity_id;
mod task_record;
mod task_status;
