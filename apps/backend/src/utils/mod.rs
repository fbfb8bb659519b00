pub mod local_id;
