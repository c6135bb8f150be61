pub mod structured_logger;
