pub mod warning_server;
