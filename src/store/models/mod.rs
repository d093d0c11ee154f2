pub mod resource_id;
