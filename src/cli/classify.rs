use crate::coach::{classify, classify_topic};

pub fn run(message: &str) {
    println!("Topic: {:?}\n", classify_topic(message));
    println!("{}", classify(message));
}
