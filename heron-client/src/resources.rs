//! CRUD resource clients
//!
//! Every resource follows the same convention: paginated list, get by id,
//! create (POST), update (PATCH), delete. One generic client covers all of
//! them; the per-resource constructors below pin the path and payload
//! types. List responses go through the envelope normalization in
//! `shared::response`, so deployments that still send bare arrays or
//! `{"items": [...]}` keep working.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    Candidate, CandidateCreate, CandidateUpdate, InterviewRound, InterviewRoundCreate,
    InterviewRoundUpdate, Job, JobCategory, JobCategoryCreate, JobCategoryUpdate, JobCreate,
    JobUpdate, MajorSkill, MajorSkillCreate, MajorSkillUpdate, Organization, OrganizationCreate,
    OrganizationUpdate, RoleCreate, RoleRecord, RoleUpdate, Skill, SkillCreate, SkillUpdate, User,
    UserCreate, UserUpdate,
};
use shared::request::ListQuery;
use shared::response::{ListPage, extract_item};

use crate::{ClientError, ClientResult, HttpClient};

/// Typed CRUD client for one API resource
pub struct ResourceClient<'a, T, C, U> {
    http: &'a HttpClient,
    path: &'static str,
    _marker: PhantomData<fn() -> (T, C, U)>,
}

impl<'a, T, C, U> ResourceClient<'a, T, C, U>
where
    T: DeserializeOwned,
    C: Serialize,
    U: Serialize,
{
    fn new(http: &'a HttpClient, path: &'static str) -> Self {
        Self {
            http,
            path,
            _marker: PhantomData,
        }
    }

    fn item_path(&self, id: &str) -> String {
        format!("/api/{}/{}", self.path, id)
    }

    /// List a page of resources
    pub async fn list(&self, query: &ListQuery) -> ClientResult<ListPage<T>> {
        let value: Value = self
            .http
            .get_with_query(&format!("/api/{}", self.path), &query.to_pairs())
            .await?;
        Ok(ListPage::from_value(&value))
    }

    /// Get a resource by id
    pub async fn get(&self, id: &str) -> ClientResult<T> {
        let value: Value = self.http.get(&self.item_path(id)).await?;
        extract_item(&value).ok_or_else(|| {
            ClientError::InvalidResponse(format!("Missing {} data", self.path))
        })
    }

    /// Create a resource
    pub async fn create(&self, payload: &C) -> ClientResult<T> {
        let value: Value = self.http.post(&format!("/api/{}", self.path), payload).await?;
        extract_item(&value).ok_or_else(|| {
            ClientError::InvalidResponse(format!("Missing created {} data", self.path))
        })
    }

    /// Update a resource (partial)
    pub async fn update(&self, id: &str, payload: &U) -> ClientResult<T> {
        let value: Value = self.http.patch(&self.item_path(id), payload).await?;
        extract_item(&value).ok_or_else(|| {
            ClientError::InvalidResponse(format!("Missing updated {} data", self.path))
        })
    }

    /// Delete a resource
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&self.item_path(id)).await?;
        Ok(())
    }
}

impl HttpClient {
    pub fn jobs(&self) -> ResourceClient<'_, Job, JobCreate, JobUpdate> {
        ResourceClient::new(self, "jobs")
    }

    pub fn candidates(&self) -> ResourceClient<'_, Candidate, CandidateCreate, CandidateUpdate> {
        ResourceClient::new(self, "candidates")
    }

    pub fn skills(&self) -> ResourceClient<'_, Skill, SkillCreate, SkillUpdate> {
        ResourceClient::new(self, "skills")
    }

    pub fn major_skills(
        &self,
    ) -> ResourceClient<'_, MajorSkill, MajorSkillCreate, MajorSkillUpdate> {
        ResourceClient::new(self, "major-skills")
    }

    pub fn job_categories(
        &self,
    ) -> ResourceClient<'_, JobCategory, JobCategoryCreate, JobCategoryUpdate> {
        ResourceClient::new(self, "job-categories")
    }

    pub fn organizations(
        &self,
    ) -> ResourceClient<'_, Organization, OrganizationCreate, OrganizationUpdate> {
        ResourceClient::new(self, "organizations")
    }

    pub fn roles(&self) -> ResourceClient<'_, RoleRecord, RoleCreate, RoleUpdate> {
        ResourceClient::new(self, "roles")
    }

    pub fn users(&self) -> ResourceClient<'_, User, UserCreate, UserUpdate> {
        ResourceClient::new(self, "users")
    }

    pub fn interview_rounds(
        &self,
    ) -> ResourceClient<'_, InterviewRound, InterviewRoundCreate, InterviewRoundUpdate> {
        ResourceClient::new(self, "interview-rounds")
    }
}
