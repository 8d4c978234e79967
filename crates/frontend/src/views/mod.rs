pub mod registry;
pub mod v101_chartjs_query;
pub mod v102_echarts_query;
pub mod v103_image_query;
pub mod v104_sql_chain;
pub mod v105_db_connect;
