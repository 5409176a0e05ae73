use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, FindOneOptions, FindOptions, ReturnDocument};

use crate::domain::entities::{HasId, Org, Unit};
use crate::domain::schedule::MusterConfiguration;

use super::errors::{FindAllError, FindError, InsertError, UpdateError};

const ORGS: &str = "orgs";
const UNITS: &str = "units";

#[async_trait]
pub trait Repository: Send + Sync {
    async fn insert_org(&self, org: Org) -> Result<Org, InsertError>;
    async fn find_org(&self, id: u32) -> Result<Org, FindError>;
    async fn update_default_muster(
        &self,
        id: u32,
        musters: Vec<MusterConfiguration>,
    ) -> Result<Org, UpdateError>;

    async fn insert_unit(&self, unit: Unit) -> Result<Unit, InsertError>;
    async fn find_unit(&self, org: u32, id: u32) -> Result<Unit, FindError>;
    async fn find_units(&self, org: u32) -> Result<Vec<Unit>, FindAllError>;
    async fn update_unit_muster(
        &self,
        org: u32,
        id: u32,
        musters: Option<Vec<MusterConfiguration>>,
    ) -> Result<Unit, UpdateError>;
}

pub struct MongoDbRepository {
    db: mongodb::Database,
}

impl MongoDbRepository {
    pub async fn new(
        uri: &str,
        database: &str,
        pool_size: u32,
    ) -> Result<MongoDbRepository, mongodb::error::Error> {
        // Parse a connection string into an options struct.
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;
        client_options.max_pool_size = Some(pool_size);

        let client = mongodb::Client::with_options(client_options)?;
        let db = client.database(database);

        db.run_command(doc! {"ping": 1}, None).await?;

        Ok(MongoDbRepository { db })
    }

    async fn fill_with_id<'a, T>(
        collection: &'a mongodb::Collection<T>,
        value: &'a mut T,
    ) -> Result<&'a mut T, mongodb::error::Error>
    where
        T: HasId + serde::de::DeserializeOwned + Unpin + Send + Sync,
    {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();

        // Get the highest ID in the collection
        let highest_id = match collection.find_one(None, options).await? {
            Some(result) => result.get_id(),
            None => 0,
        };

        value.set_id(highest_id + 1);

        Ok(value)
    }

    fn updated_options() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }
}

#[async_trait]
impl Repository for MongoDbRepository {
    async fn insert_org(&self, org: Org) -> Result<Org, InsertError> {
        let collection = self.db.collection::<Org>(ORGS);

        if collection
            .find_one(doc! { "name": org.name.clone() }, None)
            .await?
            .is_some()
        {
            return Err(InsertError::Conflict);
        }

        let mut result = org;
        collection
            .insert_one(&*Self::fill_with_id(&collection, &mut result).await?, None)
            .await?;

        Ok(result)
    }

    async fn find_org(&self, id: u32) -> Result<Org, FindError> {
        let org = self
            .db
            .collection::<Org>(ORGS)
            .find_one(doc! { "id": id }, None)
            .await?;

        org.ok_or(FindError::NotFound)
    }

    async fn update_default_muster(
        &self,
        id: u32,
        musters: Vec<MusterConfiguration>,
    ) -> Result<Org, UpdateError> {
        let filter = doc! { "id": id };
        let update = doc! {
            "$set": { "default_muster_configuration": bson::to_bson(&musters)? }
        };
        let org = self
            .db
            .collection::<Org>(ORGS)
            .find_one_and_update(filter, update, Self::updated_options())
            .await?;

        org.ok_or(UpdateError::NotFound)
    }

    async fn insert_unit(&self, unit: Unit) -> Result<Unit, InsertError> {
        let collection = self.db.collection::<Unit>(UNITS);

        if collection
            .find_one(doc! { "org": unit.org, "name": unit.name.clone() }, None)
            .await?
            .is_some()
        {
            return Err(InsertError::Conflict);
        }

        let mut result = unit;
        collection
            .insert_one(&*Self::fill_with_id(&collection, &mut result).await?, None)
            .await?;

        Ok(result)
    }

    async fn find_unit(&self, org: u32, id: u32) -> Result<Unit, FindError> {
        let unit = self
            .db
            .collection::<Unit>(UNITS)
            .find_one(doc! { "org": org, "id": id }, None)
            .await?;

        unit.ok_or(FindError::NotFound)
    }

    async fn find_units(&self, org: u32) -> Result<Vec<Unit>, FindAllError> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let units: Vec<Unit> = self
            .db
            .collection::<Unit>(UNITS)
            .find(doc! { "org": org }, options)
            .await?
            .try_collect()
            .await?;

        Ok(units)
    }

    async fn update_unit_muster(
        &self,
        org: u32,
        id: u32,
        musters: Option<Vec<MusterConfiguration>>,
    ) -> Result<Unit, UpdateError> {
        let filter = doc! { "org": org, "id": id };
        let update = doc! {
            "$set": { "muster_configuration": bson::to_bson(&musters)? }
        };
        let unit = self
            .db
            .collection::<Unit>(UNITS)
            .find_one_and_update(filter, update, Self::updated_options())
            .await?;

        unit.ok_or(UpdateError::NotFound)
    }
}
