//! In-memory repositories for service tests
//!
//! Mirrors the PostgreSQL behaviour the services rely on: ascending id order,
//! foreign keys checked on insert, inner joins dropping rows whose author is
//! missing, and not-found errors from writes that touch no row.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use forum_core::entities::{
    Discussion, DiscussionGroup, NewReply, NewThread, Reply, Thread, User,
};
use forum_core::error::DomainError;
use forum_core::projections::{
    AuthorSummary, DiscussionWithGroup, ReplyDetails, ThreadDetails, ThreadReplyCount,
};
use forum_core::traits::{
    DiscussionGroupRepository, DiscussionRepository, RepoResult, ReplyRepository,
    ThreadRepository,
};
use forum_core::value_objects::{DiscussionGroupId, DiscussionId, ReplyId, ThreadId, UserId};

use crate::services::ServiceContext;

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, User>,
    instructors: BTreeSet<UserId>,
    groups: BTreeMap<DiscussionGroupId, DiscussionGroup>,
    discussions: BTreeMap<DiscussionId, Discussion>,
    threads: BTreeMap<ThreadId, Thread>,
    replies: BTreeMap<ReplyId, Reply>,
    thread_writes: usize,
    reply_writes: usize,
    unavailable: bool,
}

impl State {
    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn next_thread_id(&self) -> ThreadId {
        ThreadId::new(self.threads.keys().next_back().map_or(1, |id| id.into_inner() + 1))
    }

    fn next_reply_id(&self) -> ReplyId {
        ReplyId::new(self.replies.keys().next_back().map_or(1, |id| id.into_inner() + 1))
    }

    fn reply_count(&self, thread_id: ThreadId) -> i64 {
        let count = self.replies.values().filter(|r| r.thread_id == thread_id).count();
        i64::try_from(count).unwrap()
    }

    fn thread_details(&self, thread: &Thread) -> Option<ThreadDetails> {
        let user = self.users.get(&thread.user_id)?;
        Some(ThreadDetails {
            thread: thread.clone(),
            author: AuthorSummary {
                user_id: user.id,
                name: user.name.clone(),
                is_instructor: user.is_instructor,
            },
            reply_count: self.reply_count(thread.id),
        })
    }

    fn reply_details(&self, reply: &Reply) -> Option<ReplyDetails> {
        let thread = self.threads.get(&reply.thread_id)?;
        let user = self.users.get(&reply.user_id)?;
        Some(ReplyDetails {
            reply: reply.clone(),
            thread_topic: thread.topic.clone(),
            author: AuthorSummary {
                user_id: user.id,
                name: user.name.clone(),
                is_instructor: self.instructors.contains(&user.id),
            },
        })
    }
}

type Shared = Arc<Mutex<State>>;

/// Ids created by [`MemoryStore::seed`]
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    pub group: DiscussionGroupId,
    pub discussion: DiscussionId,
    pub author: UserId,
}

/// Shared in-memory state with direct seeding helpers
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Shared,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> Arc<dyn DiscussionGroupRepository> {
        Arc::new(MemoryGroups(self.state.clone()))
    }

    pub fn discussions(&self) -> Arc<dyn DiscussionRepository> {
        Arc::new(MemoryDiscussions(self.state.clone()))
    }

    pub fn threads(&self) -> Arc<dyn ThreadRepository> {
        Arc::new(MemoryThreads(self.state.clone()))
    }

    pub fn replies(&self) -> Arc<dyn ReplyRepository> {
        Arc::new(MemoryReplies(self.state.clone()))
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(self.groups(), self.discussions(), self.threads(), self.replies())
    }

    /// One group with one discussion and a non-instructor author
    pub fn seed(&self) -> Seed {
        let group = self.add_group("Rust Discussion");
        Seed {
            group,
            discussion: self.add_discussion(group, "Ownership"),
            author: self.add_user("ada", false),
        }
    }

    pub fn add_user(&self, name: &str, is_instructor: bool) -> UserId {
        let mut state = self.state.lock();
        let id = UserId::new(state.users.keys().next_back().map_or(1, |id| id.into_inner() + 1));
        state.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
                is_instructor,
            },
        );
        id
    }

    pub fn add_user_with_id(&self, id: i32, name: &str) -> UserId {
        let id = UserId::new(id);
        self.state.lock().users.insert(id, User::new(id, name.to_string()));
        id
    }

    pub fn add_instructor(&self, user_id: UserId) {
        self.state.lock().instructors.insert(user_id);
    }

    pub fn add_group(&self, name: &str) -> DiscussionGroupId {
        let mut state = self.state.lock();
        let id = DiscussionGroupId::new(
            state.groups.keys().next_back().map_or(1, |id| id.into_inner() + 1),
        );
        let photo_url = format!("https://img.example.com/{}.png", id.into_inner());
        state
            .groups
            .insert(id, DiscussionGroup::new(id, name.to_string(), photo_url));
        id
    }

    pub fn add_discussion(&self, group: DiscussionGroupId, name: &str) -> DiscussionId {
        let mut state = self.state.lock();
        let id = DiscussionId::new(
            state.discussions.keys().next_back().map_or(1, |id| id.into_inner() + 1),
        );
        state
            .discussions
            .insert(id, Discussion::new(id, group, name.to_string()));
        id
    }

    pub fn add_thread(&self, user: UserId, discussion: DiscussionId, topic: &str) -> ThreadId {
        let id = self.state.lock().next_thread_id();
        self.add_thread_with_id(id.into_inner(), user, discussion, topic)
    }

    pub fn add_thread_with_id(
        &self,
        id: i32,
        user: UserId,
        discussion: DiscussionId,
        topic: &str,
    ) -> ThreadId {
        let id = ThreadId::new(id);
        let thread = NewThread::new(user, discussion, topic.to_string(), String::new()).into_thread(id);
        self.state.lock().threads.insert(id, thread);
        id
    }

    pub fn add_reply(&self, user: UserId, thread: ThreadId, detail: &str) -> ReplyId {
        let mut state = self.state.lock();
        let id = state.next_reply_id();
        let reply = NewReply::new(user, thread, detail.to_string()).into_reply(id);
        state.replies.insert(id, reply);
        id
    }

    pub fn set_thread_upvote(&self, id: ThreadId, upvote: i32) {
        if let Some(thread) = self.state.lock().threads.get_mut(&id) {
            thread.upvote = upvote;
        }
    }

    pub fn set_reply_upvote(&self, id: ReplyId, upvote: i32) {
        if let Some(reply) = self.state.lock().replies.get_mut(&id) {
            reply.upvote = upvote;
        }
    }

    pub fn thread_upvote(&self, id: ThreadId) -> Option<i32> {
        self.state.lock().threads.get(&id).map(|t| t.upvote)
    }

    pub fn reply_upvote(&self, id: ReplyId) -> Option<i32> {
        self.state.lock().replies.get(&id).map(|r| r.upvote)
    }

    pub fn thread_count(&self) -> usize {
        self.state.lock().threads.len()
    }

    pub fn reply_count(&self) -> usize {
        self.state.lock().replies.len()
    }

    /// Successful thread updates and upvote writes
    pub fn thread_writes(&self) -> usize {
        self.state.lock().thread_writes
    }

    /// Successful reply updates, deletes and upvote writes
    pub fn reply_writes(&self) -> usize {
        self.state.lock().reply_writes
    }

    /// Make every repository call fail like an unreachable database
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unavailable = unavailable;
    }
}

struct MemoryGroups(Shared);
struct MemoryDiscussions(Shared);
struct MemoryThreads(Shared);
struct MemoryReplies(Shared);

#[async_trait]
impl DiscussionGroupRepository for MemoryGroups {
    async fn find_all(&self) -> RepoResult<Vec<DiscussionGroup>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.groups.values().cloned().collect())
    }
}

#[async_trait]
impl DiscussionRepository for MemoryDiscussions {
    async fn find_all(&self) -> RepoResult<Vec<Discussion>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.discussions.values().cloned().collect())
    }

    async fn find_with_group(&self, id: DiscussionId) -> RepoResult<Option<DiscussionWithGroup>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.discussions.get(&id).and_then(|discussion| {
            state
                .groups
                .get(&discussion.discussion_group_id)
                .map(|group| DiscussionWithGroup {
                    discussion: discussion.clone(),
                    group: group.clone(),
                })
        }))
    }
}

#[async_trait]
impl ThreadRepository for MemoryThreads {
    async fn find_by_id(&self, id: ThreadId) -> RepoResult<Option<Thread>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.threads.get(&id).cloned())
    }

    async fn find_details(&self, id: ThreadId) -> RepoResult<Option<ThreadDetails>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.threads.get(&id).and_then(|t| state.thread_details(t)))
    }

    async fn find_details_by_discussion(
        &self,
        discussion_id: DiscussionId,
    ) -> RepoResult<Vec<ThreadDetails>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state
            .threads
            .values()
            .filter(|t| t.discussion_id == discussion_id)
            .filter_map(|t| state.thread_details(t))
            .collect())
    }

    async fn reply_counts(&self) -> RepoResult<Vec<ThreadReplyCount>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state
            .threads
            .values()
            .map(|t| ThreadReplyCount {
                thread_id: t.id,
                discussion_id: t.discussion_id,
                reply_count: state.reply_count(t.id),
            })
            .collect())
    }

    async fn create(&self, thread: &NewThread) -> RepoResult<Thread> {
        let mut state = self.0.lock();
        state.check_available()?;
        if !state.users.contains_key(&thread.user_id) {
            return Err(DomainError::ConstraintViolation("threads_user_id_fkey".to_string()));
        }
        if !state.discussions.contains_key(&thread.discussion_id) {
            return Err(DomainError::ConstraintViolation(
                "threads_discussion_id_fkey".to_string(),
            ));
        }

        let created = thread.clone().into_thread(state.next_thread_id());
        state.threads.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let mut state = self.0.lock();
        state.check_available()?;
        let stored = state
            .threads
            .get_mut(&thread.id)
            .ok_or(DomainError::ThreadNotFound(thread.id))?;
        stored.topic.clone_from(&thread.topic);
        stored.detail.clone_from(&thread.detail);
        state.thread_writes += 1;
        Ok(())
    }

    async fn update_upvote(&self, id: ThreadId, upvote: i32) -> RepoResult<()> {
        let mut state = self.0.lock();
        state.check_available()?;
        let stored = state
            .threads
            .get_mut(&id)
            .ok_or(DomainError::ThreadNotFound(id))?;
        stored.upvote = upvote;
        state.thread_writes += 1;
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for MemoryReplies {
    async fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state.replies.get(&id).cloned())
    }

    async fn find_details_by_thread(&self, thread_id: ThreadId) -> RepoResult<Vec<ReplyDetails>> {
        let state = self.0.lock();
        state.check_available()?;
        Ok(state
            .replies
            .values()
            .filter(|r| r.thread_id == thread_id)
            .filter_map(|r| state.reply_details(r))
            .collect())
    }

    async fn create(&self, reply: &NewReply) -> RepoResult<Reply> {
        let mut state = self.0.lock();
        state.check_available()?;
        if !state.users.contains_key(&reply.user_id) {
            return Err(DomainError::ConstraintViolation("replies_user_id_fkey".to_string()));
        }
        if !state.threads.contains_key(&reply.thread_id) {
            return Err(DomainError::ConstraintViolation("replies_thread_id_fkey".to_string()));
        }

        let created = reply.clone().into_reply(state.next_reply_id());
        state.replies.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        let mut state = self.0.lock();
        state.check_available()?;
        let stored = state
            .replies
            .get_mut(&reply.id)
            .ok_or(DomainError::ReplyNotFound(reply.id))?;
        stored.detail.clone_from(&reply.detail);
        state.reply_writes += 1;
        Ok(())
    }

    async fn delete(&self, id: ReplyId) -> RepoResult<()> {
        let mut state = self.0.lock();
        state.check_available()?;
        state
            .replies
            .remove(&id)
            .ok_or(DomainError::ReplyNotFound(id))?;
        state.reply_writes += 1;
        Ok(())
    }

    async fn update_upvote(&self, id: ReplyId, upvote: i32) -> RepoResult<()> {
        let mut state = self.0.lock();
        state.check_available()?;
        let stored = state
            .replies
            .get_mut(&id)
            .ok_or(DomainError::ReplyNotFound(id))?;
        stored.upvote = upvote;
        state.reply_writes += 1;
        Ok(())
    }
}
