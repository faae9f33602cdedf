use std::fmt::Display;

use tracing::{debug, warn};

use super::{LoadState, LoadTicket, NOTICE_LIMIT, Notice, TicketCounter};
use crate::filter::{self, AdminFilter, TabCounts};
use crate::models::{Post, PostDraft, PostPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Какая операция сохранения выполняется.
pub enum SaveKind {
    /// `POST <collection>`.
    Create,
    /// `PUT <collection>/{id}`.
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Запрос, который драйвер должен отправить при сохранении.
pub enum SaveRequest {
    /// Создать новый пост.
    Create(PostPayload),
    /// Обновить существующий пост.
    Update {
        /// Идентификатор поста.
        id: i64,
        /// Новые значения полей.
        payload: PostPayload,
    },
}

impl SaveRequest {
    /// Тип операции.
    pub fn kind(&self) -> SaveKind {
        match self {
            Self::Create(_) => SaveKind::Create,
            Self::Update { .. } => SaveKind::Update,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Состояние экрана админки: список, буфер редактирования, диалог и уведомления.
pub struct AdminState {
    posts: Vec<Post>,
    load: LoadState,
    tickets: TicketCounter,
    editing: PostDraft,
    dialog_open: bool,
    saving: Option<SaveKind>,
    notices: Vec<Notice>,
    last_notice_id: u64,
}

impl AdminState {
    /// Пустое состояние до первой загрузки.
    pub fn new() -> Self {
        Self::default()
    }

    /// Загруженный список.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Состояние загрузки списка.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Посты вкладки.
    pub fn filtered(&self, tab: AdminFilter) -> Vec<&Post> {
        filter::apply(&self.posts, |post| tab.matches(post))
    }

    /// Счётчики вкладок.
    pub fn counts(&self) -> TabCounts {
        TabCounts::from_posts(&self.posts)
    }

    /// Начинает загрузку списка.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load = LoadState::Loading;
        self.tickets.issue()
    }

    /// Применяет ответ на запрос списка.
    ///
    /// Успех целиком заменяет список. Ошибка оставляет прежний список и
    /// добавляет уведомление. Ответ на устаревший квиток игнорируется,
    /// возвращается `false`.
    pub fn finish_load<E: Display>(&mut self, ticket: LoadTicket, result: Result<Vec<Post>, E>) -> bool {
        if !self.tickets.is_current(ticket) {
            debug!(?ticket, "stale admin list response ignored");
            return false;
        }

        match result {
            Ok(posts) => {
                debug!(count = posts.len(), "admin list loaded");
                self.load = LoadState::loaded(posts.len());
                self.posts = posts;
            }
            Err(err) => {
                warn!(error = %err, "failed to load admin list");
                self.load = LoadState::Failed;
                self.notify(|id| Notice::error(id, "Не удалось загрузить статьи"));
            }
        }
        true
    }

    /// Открывает диалог создания с пустым черновиком.
    pub fn open_create(&mut self) {
        self.editing = PostDraft::default();
        self.dialog_open = true;
    }

    /// Открывает диалог редактирования, копируя поля поста из списка.
    ///
    /// Возвращает `false`, если поста нет в текущем списке.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(post) = self.posts.iter().find(|post| post.id == id) else {
            return false;
        };
        self.editing = PostDraft::from(post);
        self.dialog_open = true;
        true
    }

    /// Закрывает диалог без сохранения. Буфер остаётся как есть.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Открыт ли диалог.
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Заголовок диалога.
    pub fn dialog_title(&self) -> &'static str {
        if self.editing.is_persisted() {
            "Редактировать статью"
        } else {
            "Новая статья"
        }
    }

    /// Буфер редактирования.
    pub fn editing(&self) -> &PostDraft {
        &self.editing
    }

    /// Буфер редактирования для изменения полей формы.
    pub fn editing_mut(&mut self) -> &mut PostDraft {
        &mut self.editing
    }

    /// Идёт ли сохранение.
    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// Доступна ли кнопка сохранения: заголовок не пуст и сохранение не идёт.
    pub fn can_save(&self) -> bool {
        !self.is_saving() && !self.editing.title.is_empty()
    }

    /// Начинает сохранение буфера: create без `id`, update с `id`.
    ///
    /// Возвращает `None`, если сохранение сейчас недоступно.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if !self.can_save() {
            return None;
        }

        let payload = self.editing.to_payload();
        let request = match self.editing.id {
            Some(id) => SaveRequest::Update { id, payload },
            None => SaveRequest::Create(payload),
        };
        self.saving = Some(request.kind());
        Some(request)
    }

    /// Применяет результат сохранения.
    ///
    /// Успех закрывает диалог и очищает буфер; ошибка оставляет диалог
    /// открытым с введёнными значениями. Возвращает `true`, если список
    /// нужно перезагрузить.
    pub fn finish_save<T, E: Display>(&mut self, result: Result<T, E>) -> bool {
        let Some(kind) = self.saving.take() else {
            return false;
        };

        match result {
            Ok(_) => {
                debug!(?kind, "post saved");
                let description = match kind {
                    SaveKind::Create => "Статья создана",
                    SaveKind::Update => "Статья обновлена",
                };
                self.notify(|id| Notice::success(id, "Успешно", Some(description)));
                self.dialog_open = false;
                self.editing = PostDraft::default();
                true
            }
            Err(err) => {
                warn!(?kind, error = %err, "failed to save post");
                self.notify(|id| Notice::error(id, "Не удалось сохранить статью"));
                false
            }
        }
    }

    /// Начинает удаление. Без подтверждения запрос не отправляется.
    pub fn begin_delete(&mut self, id: i64, confirmed: bool) -> Option<i64> {
        if !confirmed {
            debug!(id, "post deletion declined");
            return None;
        }
        Some(id)
    }

    /// Применяет результат удаления. Возвращает `true`, если список нужно перезагрузить.
    pub fn finish_delete<E: Display>(&mut self, id: i64, result: Result<(), E>) -> bool {
        match result {
            Ok(()) => {
                debug!(id, "post deleted");
                self.notify(|id| Notice::success(id, "Статья удалена", None));
                true
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete post");
                self.notify(|id| Notice::error(id, "Не удалось удалить статью"));
                false
            }
        }
    }

    /// Текущие уведомления.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Забирает все накопившиеся уведомления.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Скрывает уведомление. Возвращает `false`, если его уже нет
    /// (вытеснено новым или скрыто раньше).
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    fn notify(&mut self, make: impl FnOnce(u64) -> Notice) {
        self.last_notice_id += 1;
        self.notices.push(make(self.last_notice_id));
        if self.notices.len() > NOTICE_LIMIT {
            let excess = self.notices.len() - NOTICE_LIMIT;
            self.notices.drain(..excess);
        }
    }
}
