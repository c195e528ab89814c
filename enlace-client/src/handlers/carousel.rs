//! Announcement carousel navigation and auto-advance

use iced::Task;

use enlace_common::carousel::TimerToken;

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    /// Show the first slide and schedule the first auto-advance
    pub fn start_carousel(&mut self) -> Task<Message> {
        match self.carousel.as_mut() {
            Some(carousel) => {
                let token = carousel.go_to(0);
                self.schedule_carousel_tick(token)
            }
            None => Task::none(),
        }
    }

    pub fn handle_carousel_go_to(&mut self, index: usize) -> Task<Message> {
        match self.carousel.as_mut() {
            Some(carousel) => {
                let token = carousel.go_to(index as i64);
                self.schedule_carousel_tick(token)
            }
            None => Task::none(),
        }
    }

    pub fn handle_carousel_next(&mut self) -> Task<Message> {
        match self.carousel.as_mut() {
            Some(carousel) => {
                let token = carousel.next();
                self.schedule_carousel_tick(token)
            }
            None => Task::none(),
        }
    }

    pub fn handle_carousel_previous(&mut self) -> Task<Message> {
        match self.carousel.as_mut() {
            Some(carousel) => {
                let token = carousel.previous();
                self.schedule_carousel_tick(token)
            }
            None => Task::none(),
        }
    }

    /// Scheduled auto-advance fired; stale ticks are dropped
    pub fn handle_carousel_tick(&mut self, token: TimerToken) -> Task<Message> {
        match self.carousel.as_mut().and_then(|carousel| carousel.tick(token)) {
            Some(next) => self.schedule_carousel_tick(next),
            None => Task::none(),
        }
    }

    fn schedule_carousel_tick(&self, token: TimerToken) -> Task<Message> {
        let interval = self.config.settings.carousel_interval();
        Task::perform(
            async move { tokio::time::sleep(interval).await },
            move |()| Message::CarouselTick(token),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::app_with;

    #[test]
    fn test_stale_tick_after_manual_navigation() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.start_carousel();
        let scheduled = app.carousel.as_ref().expect("carousel").token();

        let _ = app.handle_carousel_previous();
        let _ = app.handle_carousel_tick(scheduled);

        let carousel = app.carousel.as_ref().expect("carousel");
        assert_eq!(carousel.current(), carousel.slide_count() - 1);
    }

    #[test]
    fn test_current_tick_advances() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.start_carousel();
        let token = app.carousel.as_ref().expect("carousel").token();
        let _ = app.handle_carousel_tick(token);
        assert_eq!(app.carousel.as_ref().expect("carousel").current(), 1);
    }

    #[test]
    fn test_dot_selects_slide() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.handle_carousel_go_to(2);
        assert!(app.carousel.as_ref().expect("carousel").is_current(2));
    }
}
