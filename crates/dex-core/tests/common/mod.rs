pub mod json_server;
