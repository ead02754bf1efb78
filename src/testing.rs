pub mod table_contract;
