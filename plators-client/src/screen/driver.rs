use crate::collection::PostCollection;
use crate::models::{ListQuery, Post};

use super::{AdminState, PublicState, SaveRequest};

/// Экран админки, выполняющий запросы через [`PostCollection`].
pub struct AdminScreen<C> {
    collection: C,
    state: AdminState,
}

impl<C: PostCollection> AdminScreen<C> {
    /// Создаёт экран. Список не загружается до [`mount`](Self::mount).
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            state: AdminState::new(),
        }
    }

    /// Текущее состояние.
    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Состояние для действий с формой (открыть диалог, изменить поля).
    pub fn state_mut(&mut self) -> &mut AdminState {
        &mut self.state
    }

    /// Коллекция, с которой работает экран.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Первичная загрузка списка.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Перезагружает список целиком.
    pub async fn refresh(&mut self) {
        let ticket = self.state.begin_load();
        let result = self.collection.list(ListQuery::manageable()).await;
        self.state.finish_load(ticket, result);
    }

    /// Сохраняет буфер редактирования; при успехе перезагружает список.
    ///
    /// Возвращает `false`, если сохранение недоступно или не удалось.
    pub async fn save(&mut self) -> bool {
        let Some(request) = self.state.begin_save() else {
            return false;
        };

        let result = match &request {
            SaveRequest::Create(payload) => self.collection.create(payload).await,
            SaveRequest::Update { id, payload } => self.collection.update(*id, payload).await,
        };

        let saved = self.state.finish_save(result);
        if saved {
            self.refresh().await;
        }
        saved
    }

    /// Удаляет пост после подтверждения `confirm`; при успехе перезагружает список.
    ///
    /// `confirm` получает пост из текущего списка, если он там есть.
    pub async fn delete<F>(&mut self, id: i64, confirm: F) -> bool
    where
        F: FnOnce(Option<&Post>) -> bool,
    {
        let post = self.state.posts().iter().find(|post| post.id == id);
        let confirmed = confirm(post);
        let Some(id) = self.state.begin_delete(id, confirmed) else {
            return false;
        };

        let result = self.collection.delete(id).await;
        let deleted = self.state.finish_delete(id, result);
        if deleted {
            self.refresh().await;
        }
        deleted
    }
}

/// Публичная лента, загружающая опубликованные посты через [`PostCollection`].
pub struct PublicScreen<C> {
    collection: C,
    state: PublicState,
}

impl<C: PostCollection> PublicScreen<C> {
    /// Создаёт ленту. Посты не загружаются до [`mount`](Self::mount).
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            state: PublicState::new(),
        }
    }

    /// Текущее состояние.
    pub fn state(&self) -> &PublicState {
        &self.state
    }

    /// Состояние для переключения вкладок.
    pub fn state_mut(&mut self) -> &mut PublicState {
        &mut self.state
    }

    /// Загружает опубликованные посты.
    pub async fn mount(&mut self) {
        let ticket = self.state.begin_load();
        let result = self.collection.list(ListQuery::published()).await;
        self.state.finish_load(ticket, result);
    }
}
