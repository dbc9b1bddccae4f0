//! Overlay visibility flags for the video browser

/// Overlay currently receiving input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Upload,
    User,
    DeleteUser,
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub upload_overlay_open: bool,
    pub user_overlay_open: bool,
    pub delete_user_overlay_open: bool,
}

impl MenuState {
    pub fn open(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = true;
    }

    pub fn close(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = false;
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        let flag = self.flag_mut(overlay);
        *flag = !*flag;
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Upload => self.upload_overlay_open,
            Overlay::User => self.user_overlay_open,
            Overlay::DeleteUser => self.delete_user_overlay_open,
        }
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        self.top().is_some()
    }

    /// Topmost open overlay: delete-user over user over upload
    pub fn top(&self) -> Option<Overlay> {
        [Overlay::DeleteUser, Overlay::User, Overlay::Upload]
            .into_iter()
            .find(|o| self.is_open(*o))
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::Upload => &mut self.upload_overlay_open,
            Overlay::User => &mut self.user_overlay_open,
            Overlay::DeleteUser => &mut self.delete_user_overlay_open,
        }
    }
}
