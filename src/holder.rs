/// The person an account belongs to. Immutable once constructed,
/// compared field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct Holder {
    pub name: String,
    pub sex: char,
    pub age: u32,
    pub weight: f32,
}

impl Holder {
    pub fn new(name: impl Into<String>, sex: char, age: u32, weight: f32) -> Self {
        Self {
            name: name.into(),
            sex,
            age,
            weight,
        }
    }
}
