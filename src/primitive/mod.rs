/*!
Primitive keys which constructs can be resolved over
*/

pub mod nat;
