// src/ecs/world.rs

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// コンポーネントストレージと、その型専用のお掃除関数のセットだよ。
///
/// `storage` の中身は `HashMap<Entity, T>` を `Box<dyn Any>` で型消去したもの。
/// `remover` があるおかげで、`destroy_entity` は `T` を知らなくても
/// そのエンティティのコンポーネントを全種類消せるんだ。
struct ComponentStoreEntry {
    storage: Box<dyn Any>,
    remover: fn(&mut Box<dyn Any>, Entity),
}

/// ゲーム世界の全てのエンティティとコンポーネントを管理する中心的な構造体 (自作ECSのコア！)。
pub struct World {
    /// 生存しているエンティティ ID のセット。
    entities: HashSet<Entity>,
    /// 次に割り当てるエンティティ ID。
    next_entity_id: usize,
    /// `TypeId` ごとのコンポーネントストレージ。
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 新しい空の World を作る。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを生成して返す。ID は 0 からの連番。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        trace!("World: Created entity {}", entity);
        entity
    }

    /// 指定された ID でエンティティを作る。ゲーム状態みたいに ID が決まっているもの用。
    /// 既存 ID と衝突しても上書きはしない (セットなので重複もしない)。
    pub fn create_entity_with_id(&mut self, entity: Entity) {
        self.entities.insert(entity);
        self.next_entity_id = self.next_entity_id.max(entity.0 + 1);
    }

    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// エンティティを破棄する。くっついているコンポーネントも全部消えるよ 🧹
    ///
    /// 存在しないエンティティなら `false`。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.remove(&entity) {
            warn!("World: Attempted to destroy non-existent entity {}", entity);
            return false;
        }
        for entry in self.component_stores.values_mut() {
            (entry.remover)(&mut entry.storage, entity);
        }
        true
    }

    /// 新しい型のコンポーネントを登録する。二重登録しても既存データは消さない。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            warn!(
                "World: Component type {} was registered more than once; keeping existing storage.",
                std::any::type_name::<T>()
            );
            return;
        }

        // 型 T 専用のお掃除関数。ジェネリックな T をここで固定して関数ポインタにする。
        let remover_fn: fn(&mut Box<dyn Any>, Entity) = |storage_any, entity| {
            if let Some(storage) = storage_any.downcast_mut::<HashMap<Entity, T>>() {
                storage.remove(&entity);
            }
        };

        let entry = ComponentStoreEntry {
            storage: Box::new(HashMap::<Entity, T>::new()),
            remover: remover_fn,
        };
        self.component_stores.insert(type_id, entry);
        trace!("World: Registered component type {}", std::any::type_name::<T>());
    }

    /// エンティティにコンポーネントを追加 (既にあれば上書き) する。
    ///
    /// 生存していないエンティティへの追加は無視する。
    ///
    /// # パニック
    /// `register_component::<T>()` を呼び忘れている場合。これは初期化コードのバグ。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            warn!("World: Ignoring {} for dead entity {}", std::any::type_name::<T>(), entity);
            return;
        }
        match self.storage_of_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => panic!(
                "World: Component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    /// コンポーネントへの読み取り専用参照。無ければ `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage_of::<T>().and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの書き込み可能な参照。死んだエンティティには `None`。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.storage_of_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    /// コンポーネントを取り外して、その値を返す。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storage_of_mut::<T>().and_then(|storage| storage.remove(&entity))
    }

    /// 指定した型のコンポーネントを持つ生存エンティティを ID 順で返す。
    ///
    /// HashMap の並びはランダムなので、ここでソートして結果を決定的にしているよ。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .storage_of::<T>()
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .collect()
            })
            .unwrap_or_default();
        entities.sort();
        entities
    }

    fn storage_of<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn storage_of_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
