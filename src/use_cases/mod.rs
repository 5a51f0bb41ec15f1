// Use cases layer: application workflows for slip verification.

pub mod verify_slip;

#[cfg(test)]
pub(crate) mod test_support;
