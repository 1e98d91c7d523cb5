use serde::{Deserialize, Serialize};

/// A single user entry as shown in the directory.
///
/// `id` is assigned by the caller and is the only field the store looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub avatar: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        fname: impl Into<String>,
        lname: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            fname: fname.into(),
            lname: lname.into(),
            avatar: avatar.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }
}

/// Directory contents a fresh process starts with.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(
            "1",
            "george.bluth@reqres.in",
            "George",
            "Bluth",
            "https://s3.amazonaws.com/uifaces/faces/twitter/calebogden/128.jpg",
        ),
        UserRecord::new(
            "2",
            "janet.weaver@reqres.in",
            "Janet",
            "Weaver",
            "https://s3.amazonaws.com/uifaces/faces/twitter/josephstein/128.jpg",
        ),
        UserRecord::new(
            "3",
            "emma.wong@reqres.in",
            "Emma",
            "Wong",
            "https://s3.amazonaws.com/uifaces/faces/twitter/olegpogodaev/128.jpg",
        ),
        UserRecord::new(
            "4",
            "eve.holt@reqres.in",
            "Eve",
            "Holt",
            "https://s3.amazonaws.com/uifaces/faces/twitter/marcoramires/128.jpg",
        ),
        UserRecord::new(
            "5",
            "charles.morris@reqres.in",
            "Charles",
            "Morris",
            "https://s3.amazonaws.com/uifaces/faces/twitter/stephenmoon/128.jpg",
        ),
        UserRecord::new(
            "6",
            "tracey.ramos@reqres.in",
            "Tracey",
            "Ramos",
            "https://s3.amazonaws.com/uifaces/faces/twitter/bigmancho/128.jpg",
        ),
    ]
}
