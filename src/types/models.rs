/// An address together with its allocation in whole tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub address: String,
    pub quantity: f64,
}
