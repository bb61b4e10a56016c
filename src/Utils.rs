//! different utility modules used throughout the project
/// logger initialization and saving of sampled curves into csv
pub mod logger;
/// tiny module to plot a spline with its knots
pub mod plots;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
/// interpolation job read from a task document
pub mod interp_task;
