//! 并查集
//!
//! 全集在构造时固定。`find` 使用路径压缩（两遍迭代，不递归），
//! `union` 按秩合并，合计 m 次操作的复杂度为 O(m·α(n))。

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// 并查集森林
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// 元素 -> 父元素
    parent: HashMap<T, T>,
    /// 元素 -> 秩（子树高度上界）
    rank: HashMap<T, u32>,
}

impl<T> DisjointSet<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// 每个元素各自成为一个集合
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        for element in elements {
            parent.insert(element.clone(), element.clone());
            rank.insert(element, 0);
        }
        Self { parent, rank }
    }

    pub fn contains(&self, element: &T) -> bool {
        self.parent.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn not_in_universe(element: &T) -> Error {
        Error::ElementNotInUniverse(format!("{:?}", element))
    }

    /// 查找元素所在集合的代表元
    ///
    /// 全集之外的元素返回 `ElementNotInUniverse`，不会隐式插入。
    pub fn find(&mut self, element: &T) -> Result<T> {
        let mut root = element.clone();
        loop {
            let parent = self
                .parent
                .get(&root)
                .ok_or_else(|| Self::not_in_universe(element))?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // 路径上的每个节点直接指向根
        let mut current = element.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(root)
    }

    /// 合并两个元素所在的集合
    ///
    /// 已在同一集合时返回 `Ok(false)`。秩相同时第一个根挂到第二个根下，
    /// 第二个根的秩加一。
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        let rank_a = self.rank_of(&root_a);
        let rank_b = self.rank_of(&root_b);

        match rank_a.cmp(&rank_b) {
            std::cmp::Ordering::Less => {
                self.parent.insert(root_a, root_b);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(root_b, root_a);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(root_a, root_b.clone());
                self.rank.insert(root_b, rank_b + 1);
            }
        }
        Ok(true)
    }

    /// 两个元素是否在同一集合
    pub fn same_set(&mut self, a: &T, b: &T) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// 元素的秩，全集之外返回 `None`
    pub fn rank(&self, element: &T) -> Option<u32> {
        self.rank.get(element).copied()
    }

    fn rank_of(&self, element: &T) -> u32 {
        self.rank.get(element).copied().unwrap_or(0)
    }

    /// 当前集合数量
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(k, v)| k == v).count()
    }
}
