#[derive(Debug, PartialEq)]
pub enum FindError {
    NotFound,
    Unknown,
}

impl From<mongodb::error::Error> for FindError {
    fn from(value: mongodb::error::Error) -> Self {
        log::error!("occurred an error in mongodb: {}", value);
        Self::Unknown
    }
}

#[derive(Debug, PartialEq)]
pub enum FindAllError {
    Unknown,
}

impl From<mongodb::error::Error> for FindAllError {
    fn from(value: mongodb::error::Error) -> Self {
        log::error!("occurred an error in mongodb: {}", value);
        Self::Unknown
    }
}

#[derive(Debug, PartialEq)]
pub enum InsertError {
    Conflict,
    Unknown,
}

impl From<mongodb::error::Error> for InsertError {
    fn from(value: mongodb::error::Error) -> Self {
        log::error!("occurred an error in mongodb: {}", value);
        Self::Unknown
    }
}

impl From<bson::ser::Error> for InsertError {
    fn from(value: bson::ser::Error) -> Self {
        log::error!("could not serialize document for mongodb: {}", value);
        Self::Unknown
    }
}

#[derive(Debug, PartialEq)]
pub enum UpdateError {
    NotFound,
    Unknown,
}

impl From<mongodb::error::Error> for UpdateError {
    fn from(value: mongodb::error::Error) -> Self {
        log::error!("occurred an error in mongodb: {}", value);
        Self::Unknown
    }
}

impl From<bson::ser::Error> for UpdateError {
    fn from(value: bson::ser::Error) -> Self {
        log::error!("could not serialize document for mongodb: {}", value);
        Self::Unknown
    }
}

impl From<FindError> for UpdateError {
    fn from(value: FindError) -> Self {
        match value {
            FindError::NotFound => Self::NotFound,
            FindError::Unknown => Self::Unknown,
        }
    }
}
