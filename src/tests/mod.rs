mod agent_tests;
mod response_parser_tests;
