pub mod a001_survey_response;
pub mod a002_participant;
pub mod a003_question;
pub mod common;
