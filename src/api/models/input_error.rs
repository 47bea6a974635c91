use rocket::serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct InputError {
    pub message: String
}

impl InputError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        InputError { message: message.into() }
    }
}
