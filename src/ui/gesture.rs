//! 滑动手势识别
//!
//! 只记录按下时的横坐标，松开时与之比较；两次手势之间不保留任何状态。

/// 左滑返回识别器
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start_x: Option<i32>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            start_x: None,
            threshold: i32::from(threshold),
        }
    }

    /// 手势开始
    pub fn begin(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// 手势结束，向左移动超过阈值时返回 true
    pub fn finish(&mut self, x: i32) -> bool {
        match self.start_x.take() {
            Some(start) => start - x > self.threshold,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_over_threshold() {
        let mut tracker = SwipeTracker::new(60);
        tracker.begin(200);
        assert!(tracker.finish(100));
    }

    #[test]
    fn test_short_or_rightward_swipe_ignored() {
        let mut tracker = SwipeTracker::new(60);
        tracker.begin(200);
        assert!(!tracker.finish(170));

        // 恰好等于阈值不算
        tracker.begin(200);
        assert!(!tracker.finish(140));

        tracker.begin(100);
        assert!(!tracker.finish(300));
    }

    #[test]
    fn test_release_without_press() {
        let mut tracker = SwipeTracker::new(60);
        assert!(!tracker.finish(0));

        tracker.begin(500);
        assert!(tracker.finish(0));
        // 起点已被消费
        assert!(!tracker.finish(0));
    }
}
