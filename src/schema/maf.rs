use crate::types::schema::{Category, Question};

pub const MAF_CATEGORIES: &[Category] = &[
    Category {
        id: "maf_c1",
        name: "Alinhamento Setorial e NDC",
        weight: 0.15,
        questions: &[
            Question {
                id: "q1",
                text: "O projeto está implementado nos setores prioritários (energia, transporte ou indústria)?",
            },
            Question {
                id: "q2",
                text: "Qual o grau de alinhamento explícito com as prioridades climáticas nacionais da NDC?",
            },
            Question {
                id: "q3",
                text: "Há sinergia com JETPs ou Climate Club (quando aplicável)?",
            },
            Question {
                id: "q4",
                text: "O projeto se baseia em planos existentes do NDC Partnership?",
            },
        ],
    },
    Category {
        id: "maf_c2",
        name: "Ambição e Redução de Emissões",
        weight: 0.20,
        questions: &[
            Question {
                id: "q5",
                text: "Qual o perfil de redução de emissões do projeto?",
            },
            Question {
                id: "q6",
                text: "Quantas toneladas de GEE/ano o projeto prevê reduzir?",
            },
            Question {
                id: "q7",
                text: "A redução é verificável e mensurável?",
            },
            Question {
                id: "q8",
                text: "O projeto contribui para trajetórias de desenvolvimento carbono-neutro?",
            },
        ],
    },
    Category {
        id: "maf_c3",
        name: "Governança e Country-Driven",
        weight: 0.15,
        questions: &[
            Question {
                id: "q9",
                text: "O projeto está incorporado em estratégias e planos nacionais de desenvolvimento?",
            },
            Question {
                id: "q10",
                text: "Há evidência de liderança e ownership do país parceiro?",
            },
            Question {
                id: "q11",
                text: "Existe apoio institucional governamental?",
            },
        ],
    },
    Category {
        id: "maf_c4",
        name: "Combinação FC + AT",
        weight: 0.15,
        questions: &[
            Question {
                id: "q12",
                text: "O projeto combina reformas políticas/regulatórias com mecanismos financeiros?",
            },
            Question {
                id: "q13",
                text: "As políticas criam ambiente habilitador adequado?",
            },
            Question {
                id: "q14",
                text: "Os mecanismos financeiros endereçam barreiras de investimento?",
            },
            Question {
                id: "q15",
                text: "Há alavancagem de capital público e/ou privado?",
            },
        ],
    },
    Category {
        id: "maf_c5",
        name: "Alavancagem Financeira",
        weight: 0.15,
        questions: &[
            Question {
                id: "q16",
                text: "Qual a razão de alavancagem esperada (funding MAF : outros recursos)?",
            },
            Question {
                id: "q17",
                text: "Existe estratégia clara de phase-out do apoio MAF?",
            },
            Question {
                id: "q18",
                text: "Há previsão de financiamento nacional para sustentabilidade de longo prazo?",
            },
            Question {
                id: "q19",
                text: "O projeto atrai investimento privado adicional?",
            },
        ],
    },
    Category {
        id: "maf_c6",
        name: "Elegibilidade ODA",
        weight: 0.05,
        questions: &[
            Question {
                id: "q20",
                text: "Os fundos serão usados exclusivamente para benefício público?",
            },
            Question {
                id: "q21",
                text: "O projeto promove desenvolvimento sustentável em países da lista OECD DAC?",
            },
            Question {
                id: "q22",
                text: "Há impactos sociais e ambientais positivos significativos?",
            },
        ],
    },
    Category {
        id: "maf_c7",
        name: "Prontidão para Implementação",
        weight: 0.10,
        questions: &[
            Question {
                id: "q23",
                text: "O projeto pode ser implementado após fase curta de preparação?",
            },
            Question {
                id: "q24",
                text: "O escopo e escala planejados são praticamente viáveis?",
            },
            Question {
                id: "q25",
                text: "Não requer pesquisa ou desenvolvimento conceitual de tecnologias?",
            },
        ],
    },
    Category {
        id: "maf_c8",
        name: "GESI - Igualdade de Gênero e Inclusão Social",
        weight: 0.05,
        questions: &[
            Question {
                id: "q26",
                text: "O projeto aplica compreensão interseccional de GESI?",
            },
            Question {
                id: "q27",
                text: "Há medidas concretas para superar desigualdades de gênero e sociais?",
            },
            Question {
                id: "q28",
                text: "A abordagem é gender-responsive e inclusiva?",
            },
        ],
    },
];
