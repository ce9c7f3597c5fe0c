mod test_utils;
mod great_circle_tests;
mod bbox_tests;
