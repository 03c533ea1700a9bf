pub mod sheet_client;
