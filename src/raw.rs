use std::alloc::{Layout, alloc, dealloc, handle_alloc_error, realloc};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Why a regrow could not complete. The old block is still valid in both cases.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawError {
    CapacityOverflow,
    AllocFailed(Layout),
}

/// 原始内存块：只负责分配、扩容与释放，不跟踪哪些槽位已初始化
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf 独占其内存块，跨线程转移或共享引用的安全性完全取决于 T
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// 分配恰好 `cap` 个槽位；分配失败直接终止进程
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        };
        buf.regrow(cap);
        buf
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// 扩容到 `new_cap`，失败视为致命错误
    pub(crate) fn regrow(&mut self, new_cap: usize) {
        match self.try_regrow(new_cap) {
            Ok(()) => {}
            Err(RawError::CapacityOverflow) => capacity_overflow(),
            Err(RawError::AllocFailed(layout)) => handle_alloc_error(layout),
        }
    }

    /// 扩容到 `new_cap`。已初始化的前缀由 realloc 原样搬迁，失败时保持原状
    pub(crate) fn try_regrow(&mut self, new_cap: usize) -> Result<(), RawError> {
        debug_assert!(new_cap >= self.cap);
        if Self::IS_ZST || new_cap == 0 {
            // 零尺寸类型不占内存，只记录逻辑容量
            self.cap = new_cap;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| RawError::CapacityOverflow)?;
        let new_ptr = match self.current_layout() {
            // SAFETY: new_layout 非零大小且已通过 Layout::array 的溢出检查
            None => unsafe { alloc(new_layout) },
            // SAFETY: ptr 由同一分配器以 old_layout 分配，新大小不小于旧大小
            Some(old_layout) => unsafe {
                realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size())
            },
        };

        self.ptr = NonNull::new(new_ptr as *mut T).ok_or(RawError::AllocFailed(new_layout))?;
        self.cap = new_cap;
        Ok(())
    }

    /// 当前持有的内存布局；未分配或零尺寸类型时为 None
    fn current_layout(&self) -> Option<Layout> {
        if Self::IS_ZST || self.cap == 0 {
            None
        } else {
            Layout::array::<T>(self.cap).ok()
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // 元素的析构由持有者负责，这里只释放内存块
        if let Some(layout) = self.current_layout() {
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
