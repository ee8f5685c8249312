//! 絵文字レイン（背景装飾）
//!
//! 一定間隔で絵文字の雨粒を追加し、上限を超えた古い粒から捨てる。
//! 解析状態とは独立しており、参照するのは静的なテーマテーブルのみ。

use crate::theme::all_emojis;
use std::collections::VecDeque;

/// 初期表示の雨粒数
pub const INITIAL_DROPS: usize = 10;
/// 雨粒数の上限
pub const MAX_DROPS: usize = 20;
/// 追加間隔（ミリ秒）
pub const TICK_INTERVAL_MS: u32 = 800;

/// [0, 1) の乱数源
///
/// ブラウザでは `Math.random`、テストでは決定的な列を使う
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// 雨粒1つ
#[derive(Debug, Clone, PartialEq)]
pub struct Raindrop {
    pub id: u64,
    pub emoji: &'static str,
    /// 横位置（%）
    pub left: f64,
    /// 開始遅延（秒）
    pub delay: f64,
    /// 落下時間（秒）
    pub duration: f64,
    /// 文字サイズ（rem）
    pub size: f64,
}

impl Raindrop {
    /// 要素の style 属性
    pub fn style(&self) -> String {
        format!(
            "left: {}%; font-size: {}rem; animation: emojiRain {}s linear {}s infinite;",
            self.left, self.size, self.duration, self.delay
        )
    }
}

/// 上限付きの雨粒プール
#[derive(Debug, Clone)]
pub struct RainPool {
    drops: VecDeque<Raindrop>,
    emojis: Vec<&'static str>,
    capacity: usize,
    next_id: u64,
}

impl Default for RainPool {
    fn default() -> Self {
        Self::with_capacity(MAX_DROPS)
    }
}

impl RainPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            drops: VecDeque::with_capacity(capacity),
            emojis: all_emojis(),
            capacity,
            next_id: 0,
        }
    }

    /// 初期の雨粒で満たしたプールを作る
    pub fn seeded(rng: &mut impl RandomSource) -> Self {
        let mut pool = Self::default();
        for _ in 0..INITIAL_DROPS {
            pool.tick(rng);
        }
        pool
    }

    /// 雨粒を1つ追加し、上限を超える分は古い順に捨てる
    pub fn tick(&mut self, rng: &mut impl RandomSource) {
        if self.capacity == 0 {
            return;
        }
        while self.drops.len() >= self.capacity {
            self.drops.pop_front();
        }
        let drop = self.create_drop(rng);
        self.drops.push_back(drop);
    }

    fn create_drop(&mut self, rng: &mut impl RandomSource) -> Raindrop {
        let id = self.next_id;
        self.next_id += 1;

        let index = ((rng.next_f64() * self.emojis.len() as f64) as usize)
            .min(self.emojis.len().saturating_sub(1));

        Raindrop {
            id,
            emoji: self.emojis.get(index).copied().unwrap_or("😐"),
            left: rng.next_f64() * 100.0,
            delay: rng.next_f64() * 2.0,
            duration: 5.0 + rng.next_f64() * 7.0,
            size: 3.0 + rng.next_f64() * 2.0,
        }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Raindrop> {
        self.drops.iter()
    }

    pub fn to_vec(&self) -> Vec<Raindrop> {
        self.drops.iter().cloned().collect()
    }
}
