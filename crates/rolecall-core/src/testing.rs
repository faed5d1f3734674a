//! In-memory fakes of the repository and platform ports, shared by the
//! handler and wizard test modules.

use rolecall_types::component::{ActionRow, Form, FormSubmission, MessagePayload};
use rolecall_types::error::{PlatformError, RepositoryError};
use rolecall_types::prompt::{
    GuildId, Prompt, PromptDraft, PromptId, PromptRole, RoleId, UserId,
};

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::platform::interaction::ComponentInteraction;
use crate::platform::roles::GuildRoles;
use crate::platform::session::{ComponentEvent, InteractionSession};
use crate::repository::prompt::PromptRepository;
use crate::repository::role::PromptRoleRepository;

/// In-memory prompt store.
pub struct MockPromptRepository {
    prompts: Mutex<Vec<Prompt>>,
    next_id: Mutex<i64>,
}

impl MockPromptRepository {
    pub fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        let next_id = prompts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Self {
            prompts: Mutex::new(prompts),
            next_id: Mutex::new(next_id),
        }
    }

    pub fn all(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl PromptRepository for MockPromptRepository {
    async fn find_by_guild(&self, guild_id: GuildId) -> Result<Vec<Prompt>, RepositoryError> {
        Ok(self
            .prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|prompt| prompt.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        guild_id: GuildId,
        draft: &PromptDraft,
    ) -> Result<Prompt, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        let prompt = Prompt {
            id: PromptId(*next_id),
            guild_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            color: draft.color.clone(),
            use_buttons: draft.use_buttons,
        };
        *next_id += 1;
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(prompt)
    }

    async fn update(&self, id: PromptId, draft: &PromptDraft) -> Result<Prompt, RepositoryError> {
        let mut prompts = self.prompts.lock().unwrap();
        let prompt = prompts
            .iter_mut()
            .find(|prompt| prompt.id == id)
            .ok_or(RepositoryError::NotFound)?;
        prompt.title = draft.title.clone();
        prompt.description = draft.description.clone();
        prompt.image_url = draft.image_url.clone();
        prompt.color = draft.color.clone();
        prompt.use_buttons = draft.use_buttons;
        Ok(prompt.clone())
    }

    async fn delete(&self, id: PromptId) -> Result<(), RepositoryError> {
        let mut prompts = self.prompts.lock().unwrap();
        let before = prompts.len();
        prompts.retain(|prompt| prompt.id != id);
        if prompts.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// In-memory prompt-role store.
#[derive(Default)]
pub struct MockRoleRepository {
    roles: Mutex<Vec<PromptRole>>,
}

impl MockRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: Vec<PromptRole>) -> Self {
        Self {
            roles: Mutex::new(roles),
        }
    }

    pub fn all(&self) -> Vec<PromptRole> {
        self.roles.lock().unwrap().clone()
    }
}

impl PromptRoleRepository for MockRoleRepository {
    async fn find_by_prompt(&self, prompt_id: PromptId) -> Result<Vec<PromptRole>, RepositoryError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .filter(|role| role.prompt_id == prompt_id)
            .copied()
            .collect())
    }

    async fn find(
        &self,
        prompt_id: PromptId,
        role_id: RoleId,
    ) -> Result<Option<PromptRole>, RepositoryError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|role| role.prompt_id == prompt_id && role.role_id == role_id)
            .copied())
    }

    async fn delete_by_prompt(&self, prompt_id: PromptId) -> Result<(), RepositoryError> {
        self.roles
            .lock()
            .unwrap()
            .retain(|role| role.prompt_id != prompt_id);
        Ok(())
    }

    async fn create_many(
        &self,
        prompt_id: PromptId,
        role_ids: &[RoleId],
    ) -> Result<(), RepositoryError> {
        let mut roles = self.roles.lock().unwrap();
        for &role_id in role_ids {
            roles.push(PromptRole { prompt_id, role_id });
        }
        Ok(())
    }
}

/// Fake guild role cache with scripted names and memberships.
#[derive(Default)]
pub struct MockGuildRoles {
    names: HashMap<RoleId, String>,
    members: Mutex<HashMap<UserId, Vec<RoleId>>>,
    single_mutations: Mutex<usize>,
    set_calls: Mutex<usize>,
}

impl MockGuildRoles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role_id: RoleId, name: &str) -> Self {
        self.names.insert(role_id, name.to_string());
        self
    }

    pub fn with_member(self, user_id: UserId, roles: Vec<RoleId>) -> Self {
        self.members.lock().unwrap().insert(user_id, roles);
        self
    }

    pub fn member(&self, user_id: UserId) -> Vec<RoleId> {
        self.members
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn single_mutations(&self) -> usize {
        *self.single_mutations.lock().unwrap()
    }

    pub fn set_calls(&self) -> usize {
        *self.set_calls.lock().unwrap()
    }
}

impl GuildRoles for MockGuildRoles {
    async fn role_name(
        &self,
        _guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<String>, PlatformError> {
        Ok(self.names.get(&role_id).cloned())
    }

    async fn member_roles(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, PlatformError> {
        Ok(self.member(user_id))
    }

    async fn add_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        self.members
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(role_id);
        *self.single_mutations.lock().unwrap() += 1;
        Ok(())
    }

    async fn remove_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), PlatformError> {
        if let Some(roles) = self.members.lock().unwrap().get_mut(&user_id) {
            roles.retain(|role| *role != role_id);
        }
        *self.single_mutations.lock().unwrap() += 1;
        Ok(())
    }

    async fn set_member_roles(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_ids: Vec<RoleId>,
    ) -> Result<(), PlatformError> {
        self.members.lock().unwrap().insert(user_id, role_ids);
        *self.set_calls.lock().unwrap() += 1;
        Ok(())
    }
}

/// Fake published-message interaction with a scripted selection response.
pub struct MockInteraction {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub rows: Vec<ActionRow>,
    pub selection_response: Option<Vec<String>>,
    pub replies: Vec<String>,
    pub updated_rows: Option<Vec<ActionRow>>,
    pub selection_payloads: Vec<MessagePayload>,
}

impl MockInteraction {
    pub fn new(guild_id: GuildId, user_id: UserId) -> Self {
        Self {
            guild_id,
            user_id,
            rows: Vec::new(),
            selection_response: None,
            replies: Vec::new(),
            updated_rows: None,
            selection_payloads: Vec::new(),
        }
    }
}

impl ComponentInteraction for MockInteraction {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn message_rows(&self) -> &[ActionRow] {
        &self.rows
    }

    async fn update_message(&mut self, rows: Vec<ActionRow>) -> Result<(), PlatformError> {
        self.updated_rows = Some(rows);
        Ok(())
    }

    async fn reply(&mut self, content: &str) -> Result<(), PlatformError> {
        self.replies.push(content.to_string());
        Ok(())
    }

    async fn collect_selection(
        &mut self,
        payload: MessagePayload,
    ) -> Result<Option<Vec<String>>, PlatformError> {
        self.selection_payloads.push(payload);
        Ok(self.selection_response.take())
    }
}

/// Fake wizard session driven by scripted events and form/select responses.
///
/// `next_event` pops the scripted queue; an empty queue reads as the idle
/// timeout elapsing.
#[derive(Default)]
pub struct MockSession {
    pub events: VecDeque<ComponentEvent>,
    pub form_responses: VecDeque<Option<FormSubmission>>,
    pub role_responses: VecDeque<Option<Vec<RoleId>>>,
    pub renders: Vec<MessagePayload>,
    pub submenu_renders: Vec<MessagePayload>,
    pub closed_submenus: Vec<String>,
    pub opened_forms: Vec<Form>,
    pub notices: Vec<String>,
    pub published: Vec<MessagePayload>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, events: Vec<ComponentEvent>) -> Self {
        self.events = events.into();
        self
    }

    pub fn with_form_response(mut self, response: Option<FormSubmission>) -> Self {
        self.form_responses.push_back(response);
        self
    }

    pub fn with_role_response(mut self, response: Option<Vec<RoleId>>) -> Self {
        self.role_responses.push_back(response);
        self
    }

    /// The last root render, panicking if none happened.
    pub fn last_render(&self) -> &MessagePayload {
        self.renders.last().expect("no renders recorded")
    }
}

impl InteractionSession for MockSession {
    async fn render(&mut self, payload: MessagePayload) -> Result<(), PlatformError> {
        self.renders.push(payload);
        Ok(())
    }

    async fn render_submenu(&mut self, payload: MessagePayload) -> Result<(), PlatformError> {
        self.submenu_renders.push(payload);
        Ok(())
    }

    async fn close_submenu(&mut self, content: &str) -> Result<(), PlatformError> {
        self.closed_submenus.push(content.to_string());
        Ok(())
    }

    async fn next_event(
        &mut self,
        _idle: Duration,
    ) -> Result<Option<ComponentEvent>, PlatformError> {
        Ok(self.events.pop_front())
    }

    async fn open_form(
        &mut self,
        form: Form,
        _wait: Duration,
    ) -> Result<Option<FormSubmission>, PlatformError> {
        self.opened_forms.push(form);
        Ok(self.form_responses.pop_front().flatten())
    }

    async fn collect_roles(
        &mut self,
        _payload: MessagePayload,
    ) -> Result<Option<Vec<RoleId>>, PlatformError> {
        Ok(self.role_responses.pop_front().flatten())
    }

    async fn notify(&mut self, content: &str) -> Result<(), PlatformError> {
        self.notices.push(content.to_string());
        Ok(())
    }

    async fn publish(&mut self, payload: MessagePayload) -> Result<(), PlatformError> {
        self.published.push(payload);
        Ok(())
    }
}
