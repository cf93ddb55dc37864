pub mod momentum;
