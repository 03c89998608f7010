pub mod demo;
pub mod emailjs;
