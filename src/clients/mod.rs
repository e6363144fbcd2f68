pub mod gnews;
