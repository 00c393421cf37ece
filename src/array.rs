use std::fmt;
use std::ops::Deref;
use std::ptr;
use std::slice;

use tracing::{debug, trace};

use crate::error::{ArrayError, Result};
use crate::raw::{RawBuf, capacity_overflow};

/// 新建或 clear 之后的初始容量
pub const INITIAL_CAPACITY: usize = 10;

/// 每次扩容的倍数
pub const GROWTH_FACTOR: usize = 2;

/// 按倍增策略扩容的动态数组
///
/// 元素连续存放在 `[0, len)` 槽位中，`[len, capacity)` 为未初始化区域。
/// 容量从 10 开始，每次写满后翻倍，除 `clear` 外永不缩小。
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// 创建一个容量为 10 的空数组
    pub fn new() -> Self {
        Self {
            buf: RawBuf::with_capacity(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// 获取当前元素数量
    pub fn len(&self) -> usize {
        self.len
    }

    /// 与 [`len`](Self::len) 相同
    pub fn length(&self) -> usize {
        self.len
    }

    /// 获取当前容量
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// 是否没有任何元素
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 已写满；下一次写入会先触发扩容
    pub fn is_full(&self) -> bool {
        self.len == self.buf.cap()
    }

    /// 读取 `index` 处的元素
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// 以切片形式借用所有有效元素
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) 均已初始化，指针非空且对齐
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// 在末尾添加元素，写满时先扩容
    pub fn append(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        unsafe {
            // SAFETY: 已确保 len < capacity，该槽位未初始化
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        // 只有在写入成功后才增加 len
        self.len += 1;
    }

    /// 弹出末尾元素
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }

        self.len -= 1;
        // SAFETY: len 已减 1，该位置是有效的已初始化元素，读出后视为空槽
        Ok(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// 移除并返回 `index` 处的元素，其后元素左移一位
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe {
            let p = self.buf.ptr().add(index);
            let removed = ptr::read(p);
            // ptr::copy 按 memmove 语义处理重叠区间，读在写之前
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            Ok(removed)
        }
    }

    /// 在 `index` 处插入元素；`index == len` 等价于 append
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.is_full() {
            self.grow();
        }

        unsafe {
            let p = self.buf.ptr().add(index);
            // 将 [index, len) 整体右移一位，再写入新值
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, value);
        }
        self.len += 1;
        Ok(())
    }

    /// 析构所有元素并恢复到初始状态（容量 10）
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.drop_elements();
        if self.buf.cap() != INITIAL_CAPACITY {
            self.buf = RawBuf::with_capacity(INITIAL_CAPACITY);
        }
        debug!(dropped, "cleared array");
    }

    /// 预留至少 `additional` 个空槽，容量仍按倍数增长；失败时数组不变
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let failure = ArrayError::AllocationFailure {
            requested: additional,
        };
        let required = self.len.checked_add(additional).ok_or(failure)?;
        if required <= self.capacity() {
            return Ok(());
        }

        let mut new_cap = self.capacity();
        while new_cap < required {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).ok_or(failure)?;
        }
        self.buf.try_regrow(new_cap).map_err(|_| failure)?;
        trace!(additional, new_cap, "reserved capacity");
        Ok(())
    }

    fn grow(&mut self) {
        let old_cap = self.buf.cap();
        let new_cap = old_cap
            .checked_mul(GROWTH_FACTOR)
            .unwrap_or_else(|| capacity_overflow());
        self.buf.regrow(new_cap);
        debug!(old_cap, new_cap, len = self.len, "grew backing store");
    }

    fn drop_elements(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len);
        // 先清零 len，即使某个元素析构时 panic 也不会重复析构
        self.len = 0;
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: this 不会再被使用或析构，buf 的所有权转移给调用者
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.len)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // 1. 析构所有有效元素；2. 内存块由 RawBuf 释放
        self.drop_elements();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut out = Self {
            buf: RawBuf::with_capacity(self.capacity()),
            len: 0,
        };
        for item in self.iter() {
            out.append(item.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}
