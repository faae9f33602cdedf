use std::fmt::Display;

use tracing::{debug, error};

use super::{LoadState, LoadTicket, TicketCounter};
use crate::filter::{self, CategoryFilter};
use crate::models::Post;
use crate::present::PostCard;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Что показывать в сетке ленты.
pub enum ListingView {
    /// Индикатор загрузки.
    Loading,
    /// "Контент не найден": загрузка завершена, под фильтр ничего не попало.
    Empty,
    /// Карточки постов.
    Cards(Vec<PostCard>),
}

#[derive(Debug, Clone, Default)]
/// Состояние публичной ленты: опубликованные посты и выбранная категория.
pub struct PublicState {
    posts: Vec<Post>,
    load: LoadState,
    tickets: TicketCounter,
    filter: CategoryFilter,
}

impl PublicState {
    /// Пустое состояние до первой загрузки.
    pub fn new() -> Self {
        Self::default()
    }

    /// Загруженный список.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Состояние загрузки.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Идёт ли загрузка.
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Начинает загрузку ленты.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load = LoadState::Loading;
        self.tickets.issue()
    }

    /// Применяет ответ на запрос ленты. Ошибка только логируется:
    /// список остаётся пустым, после загрузки показывается пустое состояние.
    pub fn finish_load<E: Display>(&mut self, ticket: LoadTicket, result: Result<Vec<Post>, E>) -> bool {
        if !self.tickets.is_current(ticket) {
            debug!(?ticket, "stale feed response ignored");
            return false;
        }

        match result {
            Ok(posts) => {
                debug!(count = posts.len(), "feed loaded");
                self.load = LoadState::loaded(posts.len());
                self.posts = posts;
            }
            Err(err) => {
                error!(error = %err, "failed to load feed");
                self.load = LoadState::Failed;
            }
        }
        true
    }

    /// Выбранная вкладка.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Переключает вкладку. Сеть не трогается.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Посты выбранной вкладки.
    pub fn visible(&self) -> Vec<&Post> {
        let tab = self.filter;
        filter::apply(&self.posts, |post| tab.matches(post))
    }

    /// Содержимое сетки с учётом загрузки и фильтра.
    pub fn view(&self) -> ListingView {
        if self.is_loading() {
            return ListingView::Loading;
        }

        let cards: Vec<PostCard> = self.visible().into_iter().map(PostCard::from).collect();
        if cards.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Cards(cards)
        }
    }
}
