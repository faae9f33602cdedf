//! Состояние экранов ленты и админки.
//!
//! Переходы состояния синхронные (`begin_*` / `finish_*`), сетевые вызовы
//! делает драйвер: [`AdminScreen`]/[`PublicScreen`] поверх
//! [`PostCollection`](crate::PostCollection) или wasm-фронтенд.

mod admin;
mod driver;
mod public;

pub use admin::{AdminState, SaveKind, SaveRequest};
pub use driver::{AdminScreen, PublicScreen};
pub use public::{ListingView, PublicState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Состояние загрузки списка: `idle → loading → populated | empty | failed`.
pub enum LoadState {
    /// Загрузка ещё не запускалась.
    #[default]
    Idle,
    /// Запрос списка в полёте.
    Loading,
    /// Список загружен и не пуст.
    Populated,
    /// Список загружен и пуст.
    Empty,
    /// Запрос завершился ошибкой.
    Failed,
}

impl LoadState {
    pub(crate) fn loaded(len: usize) -> Self {
        if len == 0 { Self::Empty } else { Self::Populated }
    }

    /// Идёт ли загрузка.
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Квиток запроса списка. Применяется только ответ на последний выданный квиток.
pub struct LoadTicket(u64);

#[derive(Debug, Default, Clone)]
pub(crate) struct TicketCounter {
    issued: u64,
}

impl TicketCounter {
    pub(crate) fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Тип уведомления.
pub enum NoticeLevel {
    /// Успешная операция.
    Success,
    /// Операция не удалась.
    Error,
}

/// Сколько уведомлений держит экран: новое вытесняет самое старое.
pub const NOTICE_LIMIT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Кратковременное уведомление для пользователя.
///
/// Фронтенд скрывает его сам (по таймеру или клику) через
/// [`AdminState::dismiss_notice`].
pub struct Notice {
    /// Идентификатор, уникальный в пределах экрана.
    pub id: u64,
    /// Тип.
    pub level: NoticeLevel,
    /// Заголовок.
    pub title: String,
    /// Пояснение.
    pub description: Option<String>,
}

impl Notice {
    pub(crate) fn success(id: u64, title: &str, description: Option<&str>) -> Self {
        Self {
            id,
            level: NoticeLevel::Success,
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    pub(crate) fn error(id: u64, description: &str) -> Self {
        Self {
            id,
            level: NoticeLevel::Error,
            title: "Ошибка".to_string(),
            description: Some(description.to_string()),
        }
    }
}
